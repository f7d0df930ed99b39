mod endpoints;
use actix_web::web;
pub use endpoints::*;

mod model_impls;


#[rustfmt::skip]
pub fn items_router() -> actix_web::Scope {
    web::scope("/items")
        .service(create_item)
        .service(get_all_items)
        // Must be registered before the `/{item_id}` route, otherwise
        // "search" would be parsed (and rejected) as an item id.
        .service(search_items)
        .service(get_specific_item)
        .service(update_specific_item)
        .service(delete_specific_item)
}
