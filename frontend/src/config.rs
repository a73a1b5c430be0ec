
#[cfg(debug_assertions)]
pub fn get_asset_base_url() -> &'static str {
    "http://localhost:8080/assets"  // Trunk dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base_url() -> &'static str {
    "https://cdn.givers.la/assets"  // Production CDN
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base_url(), file.trim_start_matches('/'))
}

// Owned by the campaigns app, not by this router.
pub const CREATE_CAMPAIGN_PATH: &str = "/create-campaign";
pub const CAMPAIGNS_PATH: &str = "/campaigns";

pub const HERO_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1532629345422-7515f3d16bb6?auto=format&fit=crop&w=1920&q=80";

pub const WHAT_IS_GIVERS_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1559027615-cd4628902d4a?auto=format&fit=crop&w=1200&q=80";
