pub mod traits;
pub mod forward_star;
pub mod mode;
pub mod generators;

pub use traits::NetworkView;
pub use forward_star::{ForwardStar, LinkSpec};
pub use mode::{is_traversable, AllowedUses, Mode, ModeEncoding};
