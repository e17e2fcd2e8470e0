//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quickdo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quickdo_core::db::open_db_in_memory;
use quickdo_core::{
    remaining_count, FilterCategory, PersistenceMirror, SqliteSlotRepository, TaskStore,
};

fn main() {
    println!("quickdo_core ping={}", quickdo_core::ping());
    println!("quickdo_core version={}", quickdo_core::core_version());

    if let Err(err) = smoke_probe() {
        eprintln!("quickdo_core smoke=failed error={err}");
        std::process::exit(1);
    }
}

// End-to-end probe over an in-memory store: add, toggle, project, count.
fn smoke_probe() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteSlotRepository::try_new(&conn)?;
    let mut store = TaskStore::hydrate(PersistenceMirror::new(repo))?;

    store.add("first task")?;
    let second = store
        .add("second task")?
        .ok_or("second task was rejected")?;
    store.toggle_status(&second)?;

    println!("quickdo_core tasks={}", store.list().len());
    println!(
        "quickdo_core active={}",
        FilterCategory::Active.apply(store.list()).len()
    );
    println!(
        "quickdo_core completed={}",
        FilterCategory::Completed.apply(store.list()).len()
    );
    println!("quickdo_core remaining={}", remaining_count(store.list()));
    Ok(())
}
