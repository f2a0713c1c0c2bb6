use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::scene::Scene;

/// Shared handle to the running scene. Compares by pointer so it can be a Yew
/// prop without borrowing the scene during diffing.
#[derive(Clone)]
pub struct SceneHandle(Rc<RefCell<Scene>>);

impl SceneHandle {
    pub fn new(scene: Scene) -> Self {
        Self(Rc::new(RefCell::new(scene)))
    }

    pub fn borrow(&self) -> Ref<'_, Scene> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Scene> {
        self.0.borrow_mut()
    }
}

impl PartialEq for SceneHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
