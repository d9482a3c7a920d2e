use std::path::PathBuf;

use crate::utils::resource::{current_resource_path, resource_path};

#[cfg(unix)]
#[test]
fn test_resource_path_normalisation() {
    assert_eq!(
        resource_path("file:/opt/lib/tool.jar!/org/example/Item.class"),
        Some(PathBuf::from("/opt/lib/tool.jar"))
    );
    assert_eq!(
        resource_path("file:/opt/classes/org/example/Item.class"),
        Some(PathBuf::from("/opt/classes/org/example/Item.class"))
    );
    assert_eq!(resource_path("/srv/bundle.zip!/inner"), Some(PathBuf::from("/srv/bundle.zip")));
    assert_eq!(resource_path("/usr/bin/filekit"), Some(PathBuf::from("/usr/bin/filekit")));
}

#[test]
fn test_resource_path_rejects_relative() {
    assert_eq!(resource_path("classes/Item.class"), None);
    assert_eq!(resource_path("file:lib/tool.jar!/Item.class"), None);
}

#[test]
fn test_current_resource_path_exists() {
    let path = current_resource_path().expect("test binary has a location");
    assert!(path.is_absolute());
    assert!(path.exists());
}
