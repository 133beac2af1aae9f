pub mod achievements;
pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod moods;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod view;

pub use achievements::Catalog;
pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
pub use view::{build_view_model_at, StreakAndAchievementsViewModel};
