pub mod cover_art;
pub mod footer;
pub mod recent;

pub use cover_art::*;
pub use footer::Footer;
pub use recent::*;
