/// One named screen of the application. The set is closed and known at
/// compile time; screen routing is an exhaustive `match` over this enum, so
/// adding a view without wiring its screen fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppView {
    Landing,
    Login,
    Signup,
    Dashboard,
    Setup,
    Session,
    Analyzing,
    Result,
    Report,
    Summary,
    Interviews,
    History,
    Notifications,
    Profile,
    Pricing,
    Enterprise,
    About,
    Blog,
    Contact,
    Privacy,
    Terms,
}

/// Which header the shell draws above a screen. Landing draws its own hero
/// header, so it gets no chrome at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    App,
    Public,
    None,
}

impl AppView {
    pub const ALL: [AppView; 21] = [
        AppView::Landing,
        AppView::Login,
        AppView::Signup,
        AppView::Dashboard,
        AppView::Setup,
        AppView::Session,
        AppView::Analyzing,
        AppView::Result,
        AppView::Report,
        AppView::Summary,
        AppView::Interviews,
        AppView::History,
        AppView::Notifications,
        AppView::Profile,
        AppView::Pricing,
        AppView::Enterprise,
        AppView::About,
        AppView::Blog,
        AppView::Contact,
        AppView::Privacy,
        AppView::Terms,
    ];

    /// Stable tag stored in history entries.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Landing => "LANDING",
            Self::Login => "LOGIN",
            Self::Signup => "SIGNUP",
            Self::Dashboard => "DASHBOARD",
            Self::Setup => "SETUP",
            Self::Session => "SESSION",
            Self::Analyzing => "ANALYZING",
            Self::Result => "RESULT",
            Self::Report => "REPORT",
            Self::Summary => "SUMMARY",
            Self::Interviews => "INTERVIEWS",
            Self::History => "HISTORY",
            Self::Notifications => "NOTIFICATIONS",
            Self::Profile => "PROFILE",
            Self::Pricing => "PRICING",
            Self::Enterprise => "ENTERPRISE",
            Self::About => "ABOUT",
            Self::Blog => "BLOG",
            Self::Contact => "CONTACT",
            Self::Privacy => "PRIVACY",
            Self::Terms => "TERMS",
        }
    }

    /// Decodes a history tag. Unknown tags yield `None`; callers fall back
    /// to the landing view.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.tag() == tag)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::Login => "Log In",
            Self::Signup => "Sign Up",
            Self::Dashboard => "Dashboard",
            Self::Setup => "Set Up Interview",
            Self::Session => "Active Session",
            Self::Analyzing => "Analyzing",
            Self::Result => "Result",
            Self::Report => "Final Report",
            Self::Summary => "Interview Summary",
            Self::Interviews => "Interviews",
            Self::History => "Session History",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::Pricing => "Pricing",
            Self::Enterprise => "Enterprise",
            Self::About => "About",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
        }
    }

    pub fn chrome(self) -> Chrome {
        match self {
            Self::Landing => Chrome::None,
            Self::Dashboard
            | Self::Setup
            | Self::Session
            | Self::Analyzing
            | Self::Result
            | Self::Report
            | Self::Summary
            | Self::Interviews
            | Self::History
            | Self::Notifications
            | Self::Profile => Chrome::App,
            Self::Login
            | Self::Signup
            | Self::Pricing
            | Self::Enterprise
            | Self::About
            | Self::Blog
            | Self::Contact
            | Self::Privacy
            | Self::Terms => Chrome::Public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_for_every_view() {
        for view in AppView::ALL {
            assert_eq!(AppView::from_tag(view.tag()), Some(view));
        }
    }

    #[test]
    fn unknown_tag_decodes_to_none() {
        assert_eq!(AppView::from_tag("SESSIONS"), None);
        assert_eq!(AppView::from_tag(""), None);
        assert_eq!(AppView::from_tag("landing"), None);
    }

    #[test]
    fn landing_has_no_chrome_and_app_pages_get_the_app_header() {
        assert_eq!(AppView::Landing.chrome(), Chrome::None);
        assert_eq!(AppView::Dashboard.chrome(), Chrome::App);
        assert_eq!(AppView::Summary.chrome(), Chrome::App);
        assert_eq!(AppView::Pricing.chrome(), Chrome::Public);
        assert_eq!(AppView::Login.chrome(), Chrome::Public);
    }

    #[test]
    fn all_slice_covers_every_tag_exactly_once() {
        let mut tags: Vec<&str> = AppView::ALL.iter().map(|view| view.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), AppView::ALL.len());
    }
}
