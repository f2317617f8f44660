pub mod access_gate;
pub mod session_state;
pub mod session_store;
pub mod token_store;


pub use access_gate::{AccessGate, Admission};
pub use session_state::{Session, SessionPhase, SessionState};
pub use session_store::SessionStore;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
