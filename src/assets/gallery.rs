use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use super::has_extension;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Dashboard,
    Alert,
    Mimic,
}

/// Keywords that put an image into a topic. An image may match several.
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Dashboard, &["dashboard"]),
    (Topic::Alert, &["alarm", "alert"]),
    (Topic::Mimic, &["mimic"]),
];

/// Screen order inside the dashboard topic.
pub const DASHBOARD_ORDER: &[&str] = &["list", "view", "edit"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    /// Path relative to the scanned directory, `/`-separated.
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub dashboard: Vec<GalleryItem>,
    pub alert: Vec<GalleryItem>,
    pub mimic: Vec<GalleryItem>,
}

impl Gallery {
    fn topic_mut(&mut self, topic: Topic) -> &mut Vec<GalleryItem> {
        match topic {
            Topic::Dashboard => &mut self.dashboard,
            Topic::Alert => &mut self.alert,
            Topic::Mimic => &mut self.mimic,
        }
    }

    pub fn topics(&self) -> [(Topic, &[GalleryItem]); 3] {
        [
            (Topic::Dashboard, self.dashboard.as_slice()),
            (Topic::Alert, self.alert.as_slice()),
            (Topic::Mimic, self.mimic.as_slice()),
        ]
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Topic::Dashboard => "dashboard",
            Topic::Alert => "alert",
            Topic::Mimic => "mimic",
        };
        f.pad(label)
    }
}

/// Recursively list images under `dir`, sorted by relative path.
pub fn scan_images(dir: &Path) -> Vec<GalleryItem> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && has_extension(e.path(), IMAGE_EXTENSIONS))
        .map(|e| {
            let name = e
                .path()
                .strip_prefix(dir)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/");
            GalleryItem {
                name,
                path: e.into_path(),
            }
        })
        .collect()
}

fn dashboard_rank(name: &str) -> usize {
    let lowered = name.to_lowercase();
    DASHBOARD_ORDER
        .iter()
        .position(|k| lowered.contains(k))
        .unwrap_or(DASHBOARD_ORDER.len())
}

pub fn group_gallery(items: &[GalleryItem]) -> Gallery {
    let mut gallery = Gallery::default();
    for item in items {
        let lowered = item.name.to_lowercase();
        for (topic, keywords) in TOPIC_KEYWORDS {
            if keywords.iter().any(|k| lowered.contains(k)) {
                gallery.topic_mut(*topic).push(item.clone());
            }
        }
    }
    gallery.dashboard.sort_by_key(|item| dashboard_rank(&item.name));
    gallery
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn item(name: &str) -> GalleryItem {
        GalleryItem {
            name: name.to_string(),
            path: PathBuf::from(name),
        }
    }

    fn names(items: &[GalleryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_group_gallery() {
        let items = vec![
            item("Dashboard_Edit.png"),
            item("dashboard_summary.png"),
            item("Dashboard_View.png"),
            item("Alarm_Dashboard_List.png"),
            item("alert_history.png"),
            item("Mimic_Editor.png"),
            item("login.png"),
        ];
        let gallery = group_gallery(&items);

        assert_eq!(
            names(&gallery.dashboard),
            vec![
                "Alarm_Dashboard_List.png",
                "Dashboard_View.png",
                "Dashboard_Edit.png",
                "dashboard_summary.png",
            ]
        );
        assert_eq!(
            names(&gallery.alert),
            vec!["Alarm_Dashboard_List.png", "alert_history.png"]
        );
        assert_eq!(names(&gallery.mimic), vec!["Mimic_Editor.png"]);
    }

    #[test]
    fn test_scan_images_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hanprism/screens")).unwrap();
        fs::write(dir.path().join("hanprism/screens/Dashboard_List.PNG"), b"x").unwrap();
        fs::write(dir.path().join("hanprism/logo.svg"), b"x").unwrap();
        fs::write(dir.path().join("hanprism/notes.md"), b"x").unwrap();

        let items = scan_images(dir.path());
        assert_eq!(
            names(&items),
            vec!["hanprism/logo.svg", "hanprism/screens/Dashboard_List.PNG"]
        );
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let gallery = group_gallery(&scan_images(&dir.path().join("missing")));
        assert_eq!(gallery, Gallery::default());
    }
}
