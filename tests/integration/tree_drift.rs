use codetree_keeper::OutlineTree;
use super::support::{python_module, Editor, QueueScheduler};
use codetree_keeper::lifecycle::{LifecycleController, TreeEvent};
use codetree_keeper::store::portable::PortablePaths;
use codetree_keeper::store::FoldStateStore;
use codetree_keeper::tree::MemoryOutline;
use codetree_keeper::FoldStatePersistence;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn keeper(temp: &TempDir) -> LifecycleController<QueueScheduler> {
    LifecycleController::with_store(
        FoldStateStore::new(10),
        FoldStatePersistence::with_portable(
            temp.path().join("unfolded.json"),
            10,
            PortablePaths::with_home(None),
        ),
        QueueScheduler::default(),
        Duration::ZERO,
    )
}

/// The module after an edit: `on_state` renamed, a class added in front.
fn edited_module() -> MemoryOutline {
    let mut outline = MemoryOutline::new();
    let root = outline.root();
    let added = outline.add(root, "Added");
    outline.add(added, "method");
    let command = outline.add(root, "Command");
    let init = outline.add(command, "__init__");
    outline.add(init, "self._unfolded");
    let on_event = outline.add(command, "on_event");
    outline.add(on_event, "callback_str");
    let helpers = outline.add(root, "helpers");
    outline.add(helpers, "fmt");
    outline
}

#[test]
fn edited_file_restores_what_still_matches() {
    let temp = TempDir::new().unwrap();
    let mut keeper = keeper(&temp);
    let mut editor = Editor::new();

    editor.file = Some(PathBuf::from("/work/app.py"));
    keeper.handle(&mut editor, TreeEvent::BeforeFill).unwrap();
    editor.outline = Some(python_module());
    keeper.handle(&mut editor, TreeEvent::AfterFill).unwrap();
    editor.unfold(&["Command", "on_state"]);
    editor.unfold(&["Command", "__init__"]);
    editor.unfold(&["helpers"]);

    // The file is edited and the outline rebuilt in place
    keeper.handle(&mut editor, TreeEvent::BeforeFill).unwrap();
    editor.outline = Some(edited_module());
    keeper.handle(&mut editor, TreeEvent::AfterFill).unwrap();

    assert!(editor.is_unfolded(&["Command"]));
    assert!(editor.is_unfolded(&["Command", "__init__"]));
    assert!(editor.is_unfolded(&["helpers"]));
    assert!(!editor.is_unfolded(&["Command", "on_event"]));
    assert!(!editor.is_unfolded(&["Added"]));
}

#[test]
fn unrelated_file_gets_nothing_replayed() {
    let temp = TempDir::new().unwrap();
    let mut keeper = keeper(&temp);
    let mut editor = Editor::new();

    editor.file = Some(PathBuf::from("/work/app.py"));
    keeper.handle(&mut editor, TreeEvent::BeforeFill).unwrap();
    editor.outline = Some(python_module());
    keeper.handle(&mut editor, TreeEvent::AfterFill).unwrap();
    editor.unfold(&["helpers"]);

    editor.file = Some(PathBuf::from("/work/other.py"));
    keeper.handle(&mut editor, TreeEvent::BeforeFill).unwrap();
    editor.outline = Some(python_module());
    keeper.handle(&mut editor, TreeEvent::AfterFill).unwrap();

    assert!(!editor.is_unfolded(&["helpers"]));
}
