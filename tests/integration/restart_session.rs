use super::support::{python_module, rust_module, Editor, QueueScheduler};
use codetree_keeper::config::KeeperConfig;
use codetree_keeper::error::{ApiError, StorageError};
use codetree_keeper::lifecycle::{LifecycleController, TreeEvent};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn config(temp: &TempDir, max_history: usize) -> KeeperConfig {
    KeeperConfig {
        max_history,
        state_file: Some(temp.path().join("state").join("unfolded.json")),
        ..KeeperConfig::default()
    }
}

/// Switch the editor to `file`, delivering the notifications a host sends.
fn switch_to(
    keeper: &mut LifecycleController<QueueScheduler>,
    editor: &mut Editor,
    file: &str,
) {
    editor.file = Some(PathBuf::from(file));
    keeper.handle(editor, TreeEvent::BeforeFill).unwrap();
    editor.outline = Some(if file.ends_with(".rs") {
        rust_module()
    } else {
        python_module()
    });
    keeper.handle(editor, TreeEvent::AfterFill).unwrap();
}

#[test]
fn fold_state_survives_restart() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp, 10);

    {
        let mut keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
        let mut editor = Editor::new();
        switch_to(&mut keeper, &mut editor, "/work/app.py");
        editor.unfold(&["Command", "on_state"]);
        switch_to(&mut keeper, &mut editor, "/work/store.rs");
        editor.unfold(&["mod tests"]);
        keeper.handle(&mut editor, TreeEvent::Exit).unwrap();
    }

    let mut keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
    let keys: Vec<PathBuf> = keeper.store().keys().into_iter().cloned().collect();
    assert_eq!(
        keys,
        vec![PathBuf::from("/work/app.py"), PathBuf::from("/work/store.rs")]
    );

    let mut editor = Editor::new();
    switch_to(&mut keeper, &mut editor, "/work/app.py");
    assert!(editor.is_unfolded(&["Command"]));
    assert!(editor.is_unfolded(&["Command", "on_state"]));
    assert!(!editor.is_unfolded(&["Command", "__init__"]));
    assert!(!editor.is_unfolded(&["helpers"]));

    switch_to(&mut keeper, &mut editor, "/work/store.rs");
    assert!(editor.is_unfolded(&["mod tests"]));
    assert!(!editor.is_unfolded(&["impl Store"]));
}

#[test]
fn history_bound_forgets_oldest_files_after_restart() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp, 2);

    {
        let mut keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
        let mut editor = Editor::new();
        for file in ["/work/a.py", "/work/b.py", "/work/c.py"] {
            switch_to(&mut keeper, &mut editor, file);
            editor.unfold(&["helpers"]);
        }
        keeper.handle(&mut editor, TreeEvent::Exit).unwrap();
    }

    let keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
    assert!(keeper.store().get(Path::new("/work/a.py")).is_none());
    assert!(keeper.store().get(Path::new("/work/b.py")).is_some());
    assert!(keeper.store().get(Path::new("/work/c.py")).is_some());
}

#[test]
fn revisiting_a_file_refreshes_its_recency() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp, 2);

    {
        let mut keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
        let mut editor = Editor::new();
        for file in ["/work/a.py", "/work/b.py", "/work/a.py", "/work/c.py"] {
            switch_to(&mut keeper, &mut editor, file);
            editor.unfold(&["helpers"]);
        }
        keeper.handle(&mut editor, TreeEvent::Exit).unwrap();
    }

    let keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
    let keys: Vec<PathBuf> = keeper.store().keys().into_iter().cloned().collect();
    assert_eq!(
        keys,
        vec![PathBuf::from("/work/a.py"), PathBuf::from("/work/c.py")]
    );
}

#[test]
fn exit_without_anything_unfolded_writes_no_file() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp, 10);

    let mut keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
    let mut editor = Editor::new();
    switch_to(&mut keeper, &mut editor, "/work/app.py");
    keeper.handle(&mut editor, TreeEvent::Exit).unwrap();

    assert!(!config.state_file_path().unwrap().exists());
}

#[test]
fn corrupt_state_file_fails_open() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp, 10);
    let path = config.state_file_path().unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[[\"/work/a.py\"").unwrap();

    match LifecycleController::open(&config, QueueScheduler::default()) {
        Err(ApiError::StorageError(StorageError::CorruptRecord { .. })) => {}
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("corrupt state file was accepted"),
    }
}

#[test]
fn clear_then_repopulate_is_restored_by_deferred_callback() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp, 10);

    let mut keeper = LifecycleController::open(&config, QueueScheduler::default()).unwrap();
    let mut editor = Editor::new();
    switch_to(&mut keeper, &mut editor, "/work/app.py");
    editor.unfold(&["Command", "__init__"]);

    keeper.handle(&mut editor, TreeEvent::Clear).unwrap();
    editor.outline = Some(python_module());
    assert!(!editor.is_unfolded(&["Command"]));

    let pending: Vec<_> = keeper.scheduler().pending.clone();
    assert_eq!(pending.len(), 1);
    for callback in pending {
        keeper.on_deferred(&mut editor, callback);
    }

    assert!(editor.is_unfolded(&["Command", "__init__"]));
}
