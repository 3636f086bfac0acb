/* src/server/engine/rust/src/lib.rs */

pub mod compose;
pub mod context;
pub mod errors;
pub mod locale;
pub mod markup;
pub mod region;
pub mod shell;

// Public API re-exports
pub use compose::PageComposer;
pub use context::{ContentStack, RenderContext};
pub use errors::{BoxError, LayoutError};
pub use locale::{DEFAULT_LOCALE, Locale};
pub use markup::{Markup, escape_html};
pub use region::{Region, RegionRenderer, Regions, RegionsBuilder, SharedRenderer, StaticRegion};
pub use shell::ShellAttrs;
