// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Cada página es dueña de su propio estado; lo único compartido es la ruta
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::router::Route;
use crate::state::{AdminState, CatalogState, MountToken};

/// Página recién montada + token para sus tareas async
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMount {
    Cars(MountToken),
    Admin(MountToken),
}

#[derive(Clone)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,
    pub catalog: Rc<RefCell<CatalogState>>,
    pub admin: Rc<RefCell<AdminState>>,

    // Reactivity: Callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(default_country_code: &str) -> Self {
        Self {
            route: Rc::new(RefCell::new(Route::default())),
            catalog: Rc::new(RefCell::new(CatalogState::new(default_country_code))),
            admin: Rc::new(RefCell::new(AdminState::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    /// `route` ya está montada y en pantalla
    pub fn is_showing(&self, route: Route) -> bool {
        self.current_route() == route
            && match route {
                Route::Cars => self.catalog.borrow().lifecycle.is_mounted(),
                Route::Admin => self.admin.borrow().lifecycle.is_mounted(),
            }
    }

    /// Desmontar la página actual y montar la de `route`.
    /// `None` si `route` ya estaba montada: su estado se conserva.
    pub fn mount_route(&self, route: Route) -> Option<PageMount> {
        if self.is_showing(route) {
            return None;
        }

        match self.current_route() {
            Route::Cars => self.catalog.borrow_mut().unmount(),
            Route::Admin => self.admin.borrow_mut().unmount(),
        }
        *self.route.borrow_mut() = route;

        Some(match route {
            Route::Cars => PageMount::Cars(self.catalog.borrow_mut().mount()),
            Route::Admin => PageMount::Admin(self.admin.borrow_mut().mount()),
        })
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers (re-render)
    pub fn notify_subscribers(&self) {
        // Clonar la lista: un subscriber podría suscribir otro durante la iteración
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::utils::constants::DEFAULT_COUNTRY_CODE)
    }
}
