use dioxus::prelude::*;

use crate::client::routes::{CreateOrphanage, NotFound, Orphanage, OrphanagesMap};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    OrphanagesMap {},

    #[redirect("/orphanages", || Route::OrphanagesMap {})]

    #[route("/orphanages/create")]
    CreateOrphanage {},

    #[route("/orphanages/:id")]
    Orphanage { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
