pub mod watch_face;

pub use watch_face::WatchFace;
