//! Developer dashboard tabs and its hard-coded data

/// Dashboard sidebar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Projects,
    Bids,
    Profile,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        Self::Overview,
        Self::Projects,
        Self::Bids,
        Self::Profile,
        Self::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Projects => "My Projects",
            Self::Bids => "My Bids",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Colour role for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Accent,
    Primary,
    Secondary,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::InProgress => StatusTone::Primary,
            Self::Review => StatusTone::Secondary,
            Self::Completed => StatusTone::Accent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidStatus {
    Pending,
    Accepted,
}

impl BidStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Pending => StatusTone::Warning,
            Self::Accepted => StatusTone::Accent,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pending => "!",
            Self::Accepted => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub client: &'static str,
    pub status: ProjectStatus,
    pub deadline: &'static str,
    /// Whole dollars
    pub budget: u32,
    /// Percent, 0-100
    pub completion: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: u32,
    pub project: &'static str,
    /// Whole dollars
    pub amount: u32,
    pub status: BidStatus,
    pub submitted_at: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperProfile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub title: &'static str,
    pub member_since: &'static str,
    pub skills: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingGroup {
    Notifications,
    Privacy,
}

impl SettingGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Notifications => "Notification Preferences",
            Self::Privacy => "Privacy Settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingToggle {
    pub group: SettingGroup,
    pub label: &'static str,
    pub enabled: bool,
}

/// Format whole dollars with thousands separators: `12000` -> `$12,000`
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${out}")
}

pub fn mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-commerce Mobile App",
            client: "TechCorp Inc.",
            status: ProjectStatus::InProgress,
            deadline: "2024-02-15",
            budget: 5_000,
            completion: 65,
        },
        Project {
            id: 2,
            title: "AI Dashboard",
            client: "DataFlow Solutions",
            status: ProjectStatus::Review,
            deadline: "2024-01-30",
            budget: 8_500,
            completion: 90,
        },
        Project {
            id: 3,
            title: "Portfolio Website",
            client: "Creative Studio",
            status: ProjectStatus::Completed,
            deadline: "2024-01-10",
            budget: 2_500,
            completion: 100,
        },
    ]
}

pub fn mock_bids() -> Vec<Bid> {
    vec![
        Bid {
            id: 1,
            project: "Social Media Platform",
            amount: 12_000,
            status: BidStatus::Pending,
            submitted_at: "2024-01-20",
        },
        Bid {
            id: 2,
            project: "Learning Management System",
            amount: 15_500,
            status: BidStatus::Accepted,
            submitted_at: "2024-01-18",
        },
    ]
}

pub const OVERVIEW_STATS: [Stat; 4] = [
    Stat {
        label: "Active Projects",
        value: "5",
    },
    Stat {
        label: "Total Earnings",
        value: "$24,500",
    },
    Stat {
        label: "Pending Bids",
        value: "3",
    },
    Stat {
        label: "Success Rate",
        value: "92%",
    },
];

pub fn mock_profile() -> DeveloperProfile {
    DeveloperProfile {
        name: "Muhammad Ibrahim",
        initials: "IB",
        headline: "Senior Developer",
        title: "Senior Full-Stack Developer",
        member_since: "Member since 2023 SMIT",
        skills: &[
            "React",
            "Node.js",
            "TypeScript",
            "Python",
            "AWS",
            "MongoDB",
            "GraphQL",
            "Docker",
        ],
        email: "ibrahimcom@example.com",
        github: "github.com/ibrahimcs51",
        linkedin: "linkedin.com/in/muhammad ibrahim",
    }
}

pub fn default_settings() -> Vec<SettingToggle> {
    vec![
        SettingToggle {
            group: SettingGroup::Notifications,
            label: "Email notifications for new projects",
            enabled: true,
        },
        SettingToggle {
            group: SettingGroup::Notifications,
            label: "Project deadline reminders",
            enabled: true,
        },
        SettingToggle {
            group: SettingGroup::Notifications,
            label: "Marketing emails",
            enabled: false,
        },
        SettingToggle {
            group: SettingGroup::Privacy,
            label: "Make my profile public",
            enabled: true,
        },
        SettingToggle {
            group: SettingGroup::Privacy,
            label: "Show my earnings publicly",
            enabled: true,
        },
    ]
}

/// Dashboard view state. Nothing here outlives the view.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub projects: Vec<Project>,
    pub bids: Vec<Bid>,
    pub profile: DeveloperProfile,
    pub settings: Vec<SettingToggle>,
    pub selected_setting: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            active_tab: DashboardTab::default(),
            projects: mock_projects(),
            bids: mock_bids(),
            profile: mock_profile(),
            settings: default_settings(),
            selected_setting: 0,
        }
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    /// Projects shown in the overview's "Recent Projects" card
    pub fn recent_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(3)]
    }

    pub fn move_setting_down(&mut self) {
        if self.selected_setting + 1 < self.settings.len() {
            self.selected_setting += 1;
        }
    }

    pub fn move_setting_up(&mut self) {
        self.selected_setting = self.selected_setting.saturating_sub(1);
    }

    pub fn toggle_selected_setting(&mut self) {
        if let Some(setting) = self.settings.get_mut(self.selected_setting) {
            setting.enabled = !setting.enabled;
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
