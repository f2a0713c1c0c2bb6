pub mod frame_clock;
pub mod scene_handle;

pub use frame_clock::FrameClock;
pub use scene_handle::SceneHandle;
