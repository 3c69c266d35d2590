pub const BRAND: &str = "Hyfire";

pub const PHRASES: [&str; 4] = ["数字创意", "跨界设计", "技术创新", "极致体验"];

pub const BACKGROUND_IMAGE: &str = "/background.jpg";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#about", label: "关于我们" },
    NavItem { href: "#services", label: "服务项目" },
    NavItem { href: "#contact", label: "联系我们" },
];

// The mobile panel lists these ahead of NAV_ITEMS.
pub const MOBILE_EXTRA_ITEMS: &[NavItem] = &[
    NavItem { href: "#about", label: "关于我们" },
    NavItem { href: "#services", label: "专业服务" },
    NavItem { href: "#projects", label: "项目作品" },
    NavItem { href: "#contact", label: "加入我们" },
];

pub fn mobile_nav_items() -> impl Iterator<Item = &'static NavItem> {
    MOBILE_EXTRA_ITEMS.iter().chain(NAV_ITEMS.iter())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[Service {
    title: "Minecraft Server",
    description: "Minecraft 客制化开发",
    features: &["Java", "Plugin", "Building"],
}];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub action: &'static str,
    pub accent: &'static str,
}

impl ContactCard {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "加入我们",
        blurb: "发送 HR 至 hi@hyfire.cloud",
        email: "hi@hyfire.cloud",
        action: "立即申请",
        accent: "bg-blue-600",
    },
    ContactCard {
        title: "需求咨询",
        blurb: "请发送需求至 support@hyfire.cloud",
        email: "support@hyfire.cloud",
        action: "立即联系",
        accent: "bg-green-600",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegistrationLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

pub const COPYRIGHT: &str = "© 2025 Hyfire Studio";

pub const ICP_RECORD: RegistrationLink = RegistrationLink {
    href: "https://beian.miit.gov.cn/",
    label: "皖ICP备2025076830号-1",
    icon: None,
};

pub const PUBLIC_SECURITY_RECORD: RegistrationLink = RegistrationLink {
    href: "http://www.beian.gov.cn/portal/registerSystemInfo?recordcode=XXXXXXXXXXXX",
    label: "XXXXXXXXXXXX",
    icon: Some("/beian.png"),
};
