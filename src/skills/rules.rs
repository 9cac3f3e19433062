//! Merge rules and category keyword tables for skill classification.

use serde::Serialize;

/// Raw skill names that are shown under one combined label.
pub struct MergeRule {
    pub members: &'static [&'static str],
    pub label: &'static str,
}

/// Applied in this order; the order fixes where combined labels land.
pub const MERGE_RULES: &[MergeRule] = &[
    MergeRule {
        members: &["Spring Boot", "Spring MVC"],
        label: "Spring Boot/Spring MVC",
    },
    MergeRule {
        members: &["JavaScript", "TypeScript"],
        label: "JavaScript/TypeScript",
    },
    MergeRule {
        members: &["HTML5", "CSS3"],
        label: "HTML5/CSS3",
    },
    MergeRule {
        members: &["MySQL", "MariaDB", "SQL Server"],
        label: "MySQL/MariaDB/SQL Server",
    },
];

/// `follower` is moved right behind `anchor` when both are present.
pub const ADJACENCY: &[(&str, &str)] = &[("JavaScript/TypeScript", "jQuery")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Desktop,
    Web,
    Embedded,
    Tools,
}

/// A category claims a skill when its lower-cased name contains any keyword
/// and none of the exclusions.
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub excludes: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
            && !self.excludes.iter().any(|e| lowered.contains(e))
    }
}

/// Evaluated top to bottom, first match wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Tools,
        keywords: &[
            "tomcat",
            "git",
            "svn",
            "visual studio",
            "eclipse",
            "qt creator",
            "stm32cube",
            "jenkins",
            "docker",
            "jira",
            "postman",
            "intellij",
        ],
        excludes: &[],
    },
    CategoryRule {
        category: Category::Embedded,
        keywords: &[
            "buildroot",
            "embedded",
            "stm32",
            "usb hid",
            "serial",
            "socket",
            "qt",
        ],
        excludes: &["qt creator"],
    },
    CategoryRule {
        category: Category::Web,
        keywords: &[
            "asp.net",
            "web api",
            "spring",
            "mybatis",
            "typescript",
            "angular",
            "react",
            "javascript",
            "jquery",
            "html5",
            "css3",
            "mysql",
            "mariadb",
            "sql server",
            "flask",
            "python",
            "highcharts",
            "signalr",
            "entity framework",
        ],
        excludes: &[],
    },
    CategoryRule {
        category: Category::Desktop,
        keywords: &[".net", "c#", "wpf", "mfc", "c++", "sqlite", "devexpress"],
        excludes: &[],
    },
];

/// Where skills that match no rule end up.
pub const FALLBACK_CATEGORY: Category = Category::Web;

/// Tools containing these keywords come first, in this order. Other tools
/// follow alphabetically.
pub const TOOL_PRIORITY: &[&str] = &[
    "visual studio",
    "qt creator",
    "eclipse",
    "stm32cube",
    "git",
    "svn",
];
