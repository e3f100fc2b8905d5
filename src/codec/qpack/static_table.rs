use std::collections::HashMap;

use lazy_static::lazy_static;

/// The fixed header table, indexed by position. No dynamic table exists in
/// this codec, so these entries are the whole index space.
pub static STATIC_TABLE: [(&str, &str); 99] = [
    (":authority", ""),
    (":path", "/"),
    ("age", "0"),
    ("content-disposition", ""),
    ("content-length", "0"),
    ("cookie", ""),
    ("date", ""),
    ("etag", ""),
    ("if-modified-since", ""),
    ("if-none-match", ""),
    ("last-modified", ""),
    ("link", ""),
    ("location", ""),
    ("referer", ""),
    ("set-cookie", ""),
    (":method", "CONNECT"),
    (":method", "DELETE"),
    (":method", "GET"),
    (":method", "HEAD"),
    (":method", "OPTIONS"),
    (":method", "POST"),
    (":method", "PUT"),
    (":scheme", "http"),
    (":scheme", "https"),
    (":status", "103"),
    (":status", "200"),
    (":status", "304"),
    (":status", "404"),
    (":status", "503"),
    ("accept", "*/*"),
    ("accept", "application/dns-message"),
    ("accept-encoding", "gzip, deflate, br"),
    ("accept-ranges", "bytes"),
    ("access-control-allow-headers", "cache-control"),
    ("access-control-allow-headers", "content-type"),
    ("access-control-allow-origin", "*"),
    ("cache-control", "max-age=0"),
    ("cache-control", "max-age=2592000"),
    ("cache-control", "max-age=604800"),
    ("cache-control", "no-cache"),
    ("cache-control", "no-store"),
    ("cache-control", "public, max-age=31536000"),
    ("content-encoding", "br"),
    ("content-encoding", "gzip"),
    ("content-type", "application/dns-message"),
    ("content-type", "application/javascript"),
    ("content-type", "application/json"),
    ("content-type", "application/x-www-form-urlencoded"),
    ("content-type", "image/gif"),
    ("content-type", "image/jpeg"),
    ("content-type", "image/png"),
    ("content-type", "text/css"),
    ("content-type", "text/html; charset=utf-8"),
    ("content-type", "text/plain"),
    ("content-type", "text/plain;charset=utf-8"),
    ("range", "bytes=0-"),
    ("strict-transport-security", "max-age=31536000"),
    ("strict-transport-security", "max-age=31536000; includesubdomains"),
    (
        "strict-transport-security",
        "max-age=31536000; includesubdomains; preload",
    ),
    ("vary", "accept-encoding"),
    ("vary", "origin"),
    ("x-content-type-options", "nosniff"),
    ("x-xss-protection", "1; mode=block"),
    (":status", "100"),
    (":status", "204"),
    (":status", "206"),
    (":status", "302"),
    (":status", "400"),
    (":status", "403"),
    (":status", "421"),
    (":status", "425"),
    (":status", "500"),
    ("accept-language", ""),
    ("access-control-allow-credentials", "FALSE"),
    ("access-control-allow-credentials", "TRUE"),
    ("access-control-allow-headers", "*"),
    ("access-control-allow-methods", "get"),
    ("access-control-allow-methods", "get, post, options"),
    ("access-control-allow-methods", "options"),
    ("access-control-expose-headers", "content-length"),
    ("access-control-request-headers", "content-type"),
    ("access-control-request-method", "get"),
    ("access-control-request-method", "post"),
    ("alt-svc", "clear"),
    ("authorization", ""),
    (
        "content-security-policy",
        "script-src 'none'; object-src 'none'; base-uri 'none'",
    ),
    ("early-data", "1"),
    ("expect-ct", ""),
    ("forwarded", ""),
    ("if-range", ""),
    ("origin", ""),
    ("purpose", "prefetch"),
    ("server", ""),
    ("timing-allow-origin", "*"),
    ("upgrade-insecure-requests", "1"),
    ("user-agent", ""),
    ("x-forwarded-for", ""),
    ("x-frame-options", "deny"),
    ("x-frame-options", "sameorigin"),
];

lazy_static! {
    static ref EXACT_INDEX: HashMap<(&'static [u8], &'static [u8]), u64> = {
        let mut map = HashMap::new();
        for (index, (name, value)) in STATIC_TABLE.iter().enumerate() {
            map.entry((name.as_bytes(), value.as_bytes()))
                .or_insert(index as u64);
        }
        map
    };
    static ref NAME_INDEX: HashMap<&'static [u8], u64> = {
        let mut map = HashMap::new();
        for (index, (name, _)) in STATIC_TABLE.iter().enumerate() {
            map.entry(name.as_bytes()).or_insert(index as u64);
        }
        map
    };
}

pub fn get(index: u64) -> Option<(&'static [u8], &'static [u8])> {
    let entry = STATIC_TABLE.get(usize::try_from(index).ok()?)?;
    Some((entry.0.as_bytes(), entry.1.as_bytes()))
}

/// Finds the best match for a header: `(index, true)` when name and value
/// both match, `(index, false)` when only the name does.
pub fn find(name: &[u8], value: &[u8]) -> Option<(u64, bool)> {
    if let Some(index) = EXACT_INDEX.get(&(name, value)) {
        return Some((*index, true));
    }
    NAME_INDEX.get(name).map(|index| (*index, false))
}

#[cfg(test)]
mod tests {
    use super::{find, get, STATIC_TABLE};

    #[test]
    fn lookup() {
        assert_eq!(get(17), Some((&b":method"[..], &b"GET"[..])));
        assert_eq!(get(99), None);
        assert_eq!(find(b":method", b"GET"), Some((17, true)));
        assert_eq!(find(b":method", b"TRACE"), Some((15, false)));
        assert_eq!(find(b"x-custom", b"1"), None);
    }

    #[test]
    fn all_names_lowercase() {
        for (name, _) in STATIC_TABLE.iter() {
            assert!(!name.bytes().any(|byte| byte.is_ascii_uppercase()));
        }
    }
}
