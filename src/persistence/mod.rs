pub mod files;
pub mod tasks;

pub use files::{
    atomic_write, ensure_myday_dir, get_myday_dir, init_local_myday, read_file, tasks_file,
};
pub use tasks::{load_tasks, save_tasks, seed_tasks};
