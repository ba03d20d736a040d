mod build;
mod camera;
mod interaction;
mod view;

pub(super) use camera::OrbitCamera;
