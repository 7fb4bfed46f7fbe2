//! Configuration section definitions.

mod build;
mod content;
mod monetization;
mod seo;
mod site;

pub use build::{BuildConfig, BuildTarget};
pub use content::{ContentConfig, ImageSource, ImagesConfig};
pub use monetization::{
    AdSenseConfig, AdSlotsConfig, ConsentConfig, ConsentMode, MonetizationConfig,
    is_valid_adsense_client_id,
};
pub use seo::SeoConfig;
pub use site::{AuthorConfig, SiteConfig};
