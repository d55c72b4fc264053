// # Client-backed Implementations
//
// `InfoProvider` and `DnsEditor` built on top of a shared `DnsClient`.

pub mod editor;
pub mod info;

pub use editor::ClientEditor;
pub use info::ClientInfoProvider;
