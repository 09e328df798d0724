pub mod auto_close;
pub mod quit;

pub use auto_close::AutoClosePlugin;
pub use quit::QuitPlugin;
