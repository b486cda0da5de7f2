use std::fs;
use std::path::Path;

use dndtree_core::Record;

use crate::errors::ItemsError;

/// Items shown when no file is given or the file cannot be read.
pub(crate) fn sample_items() -> Vec<Record> {
    vec![
        Record::new("1", None).with_label("Home Page"),
        Record::new("2", None).with_label("Products"),
        Record::new("3", Some("2")).with_label("Electronics"),
        Record::new("4", Some("2")).with_label("Clothing"),
        Record::new("5", Some("3")).with_label("Smartphones"),
        Record::new("6", Some("3")).with_label("Laptops"),
        Record::new("7", None).with_label("About Us"),
        Record::new("8", None).with_label("Contact"),
    ]
}

/// Load the launch items, falling back to [`sample_items`].
pub(crate) fn load_initial_items(path: Option<&Path>) -> Vec<Record> {
    let Some(path) = path else {
        return sample_items();
    };

    match load_items_from(path) {
        Ok(items) => {
            log::info!("loaded {} items from {}", items.len(), path.display());
            items
        },
        Err(err) => {
            log::warn!(
                "items at {} unusable, showing samples: {err}",
                path.display()
            );
            sample_items()
        },
    }
}

/// Read a JSON array of flat records.
pub(crate) fn load_items_from(path: &Path) -> Result<Vec<Record>, ItemsError> {
    let data = fs::read_to_string(path)?;
    let items = serde_json::from_str(&data)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TempDirGuard;

    #[test]
    fn given_items_file_when_loading_then_records_keep_host_fields() {
        let root = TempDirGuard::new("items_load");
        let path = root.path().join("items.json");
        fs::write(
            &path,
            r#"[
                { "id": 1, "parent_id": null, "label": "Root" },
                { "id": "2", "parent_id": 1, "color": "red" }
            ]"#,
        )
        .expect("items payload should be written");

        let items = load_items_from(&path).expect("items should load");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].label.as_deref(), Some("Root"));
        assert_eq!(items[1].parent_id.as_deref(), Some("1"));
        assert_eq!(
            items[1].extra.get("color"),
            Some(&serde_json::Value::from("red"))
        );
    }

    #[test]
    fn given_missing_file_when_loading_then_io_error_is_returned() {
        let root = TempDirGuard::new("items_missing");

        let result = load_items_from(&root.path().join("absent.json"));

        assert!(matches!(result, Err(ItemsError::Io(_))));
    }

    #[test]
    fn given_object_instead_of_array_when_loading_then_json_error() {
        let root = TempDirGuard::new("items_object");
        let path = root.path().join("items.json");
        fs::write(&path, r#"{ "id": "1" }"#)
            .expect("items payload should be written");

        let result = load_items_from(&path);

        assert!(matches!(result, Err(ItemsError::Json(_))));
    }

    #[test]
    fn given_broken_file_when_loading_initial_items_then_samples_are_used() {
        let root = TempDirGuard::new("items_fallback");
        let path = root.path().join("items.json");
        fs::write(&path, "not json").expect("payload should be written");

        let items = load_initial_items(Some(&path));

        assert_eq!(items, sample_items());
    }

    #[test]
    fn given_no_path_when_loading_initial_items_then_samples_are_used() {
        let items = load_initial_items(None);

        assert_eq!(items.len(), 8);
        assert_eq!(items[4].display_label(), "Smartphones");
        assert_eq!(items[4].parent_id.as_deref(), Some("3"));
    }
}
