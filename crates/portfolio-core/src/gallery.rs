//! Project gallery category filter.

use std::fmt;
use std::str::FromStr;

use crate::content::Project;
use crate::error::PortfolioError;

/// Fixed set of gallery filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    AiMl,
    Fullstack,
    Backend,
}

impl Category {
    /// All categories in filter-bar order
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::AiMl,
        Category::Fullstack,
        Category::Backend,
    ];

    /// Stable id, e.g. `"ai-ml"`
    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::AiMl => "ai-ml",
            Category::Fullstack => "fullstack",
            Category::Backend => "backend",
        }
    }

    /// Filter button label
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::AiMl => "AI/ML & Computer Vision",
            Category::Fullstack => "Full Stack",
            Category::Backend => "Backend & Data",
        }
    }

    /// Whether a project tagged `category` passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        *self == Category::All || *self == category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| PortfolioError::UnknownCategory(s.to_string()))
    }
}

/// Projects passing `active`, in their original order.
pub fn filter_projects(projects: &[Project], active: Category) -> Vec<&Project> {
    projects.iter().filter(|p| active.admits(p.category)).collect()
}

/// Gallery selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    projects: &'static [Project],
    active: Category,
}

impl Gallery {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            active: Category::All,
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    /// Replace the active category.
    pub fn select(&mut self, category: Category) {
        if self.active != category {
            tracing::debug!(from = %self.active, to = %category, "Gallery filter changed");
        }
        self.active = category;
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        filter_projects(self.projects, self.active)
    }
}
