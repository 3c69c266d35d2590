use log::Level;

pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub lang: &'static str,
}

pub const METADATA: SiteMetadata = SiteMetadata {
    title: "Hyfire | 探索创造",
    description: "Hyfire 是一个 Minecraft 服务器社区，致力于为玩家提供一个友好的创造社区",
    lang: "en",
};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Rotation and menu steps are traced when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
