//! Skill list normalization and grouping for display.

mod rules;

use std::collections::HashSet;

use serde::Serialize;

pub use rules::{
    ADJACENCY, CATEGORY_RULES, Category, FALLBACK_CATEGORY, MERGE_RULES, TOOL_PRIORITY,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillGroups {
    pub desktop: Vec<String>,
    pub web: Vec<String>,
    pub embedded: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillGroups {
    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Desktop => &mut self.desktop,
            Category::Web => &mut self.web,
            Category::Embedded => &mut self.embedded,
            Category::Tools => &mut self.tools,
        }
    }

    /// Groups in display order with their headings.
    pub fn columns(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Desktop", self.desktop.as_slice()),
            ("Web", self.web.as_slice()),
            ("Embedded", self.embedded.as_slice()),
            ("Tools", self.tools.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub normalized: Vec<String>,
    pub groups: SkillGroups,
}

pub fn classify(skills: &[String]) -> Classification {
    let normalized = normalize_skills(skills);
    let groups = group_skills(&normalized);
    Classification { normalized, groups }
}

/// Merge related skills into combined labels and drop duplicates.
///
/// Combined labels come first, in rule order, followed by every untouched
/// skill in input order.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let present: HashSet<&str> = skills.iter().map(String::as_str).collect();
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    for rule in MERGE_RULES {
        if rule.members.iter().any(|m| present.contains(m)) {
            consumed.extend(rule.members.iter().copied());
            push_unique(&mut out, rule.label);
        }
    }

    for skill in skills {
        if !consumed.contains(skill.as_str()) {
            push_unique(&mut out, skill);
        }
    }

    for (anchor, follower) in ADJACENCY {
        place_after(&mut out, anchor, follower);
    }

    out
}

fn push_unique(out: &mut Vec<String>, item: &str) {
    if !out.iter().any(|existing| existing == item) {
        out.push(item.to_string());
    }
}

fn place_after(list: &mut Vec<String>, anchor: &str, follower: &str) {
    let Some(follower_idx) = list.iter().position(|s| s == follower) else {
        return;
    };
    if !list.iter().any(|s| s == anchor) {
        return;
    }

    let item = list.remove(follower_idx);
    // anchor may have shifted left by the removal
    let anchor_idx = list.iter().position(|s| s == anchor).unwrap_or(0);
    list.insert(anchor_idx + 1, item);
}

/// The category a single skill belongs to.
pub fn categorize(skill: &str) -> Category {
    let lowered = skill.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(FALLBACK_CATEGORY)
}

pub fn group_skills(skills: &[String]) -> SkillGroups {
    let mut groups = SkillGroups::default();
    for skill in skills {
        groups.bucket_mut(categorize(skill)).push(skill.clone());
    }
    sort_tools(&mut groups.tools);
    groups
}

fn tool_rank(tool: &str) -> usize {
    let lowered = tool.to_lowercase();
    TOOL_PRIORITY
        .iter()
        .position(|k| lowered.contains(k))
        .unwrap_or(TOOL_PRIORITY.len())
}

fn sort_tools(tools: &mut [String]) {
    // stable: prioritized tools sharing a rank keep their input order
    tools.sort_by_cached_key(|tool| {
        let rank = tool_rank(tool);
        let alpha = if rank == TOOL_PRIORITY.len() {
            tool.to_lowercase()
        } else {
            String::new()
        };
        (rank, alpha)
    });
}
