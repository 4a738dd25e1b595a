//! Client-side recipe panel: shows recipe partials from a recipe server in a
//! viewer region and deletes recipes, reloading the page afterwards.

pub mod config;
pub mod error;
pub mod messages;
pub mod panel;
pub mod recipe;
pub mod reload;
pub mod surface;

pub use config::{read_config, PanelConfig};
pub use error::PanelError;
pub use messages::Messages;
pub use panel::{RecipePanel, Rendered, RequestOutcome};
pub use recipe::{RecipeApi, RecipeId};
pub use reload::{schedule_reload, ChannelReloader, PageReloader};
pub use surface::{MemorySurface, TerminalSurface, ViewerSurface, VIEWER_ID};
