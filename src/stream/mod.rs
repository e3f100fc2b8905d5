pub mod control;
pub mod request;

/// Which end of the connection a state machine is acting for. The roles
/// share almost all behavior; the differences are a handful of frames each
/// side may not receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Server,
}
