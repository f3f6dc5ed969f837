mod resolve;
pub use resolve::run as resolve;

mod sources;
pub use sources::run as sources;

mod versions;
pub use versions::run as versions;
