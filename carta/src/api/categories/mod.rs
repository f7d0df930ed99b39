mod endpoints;
use actix_web::web;
pub use endpoints::*;

mod model_impls;


#[rustfmt::skip]
pub fn categories_router() -> actix_web::Scope {
    web::scope("/categories")
        .service(create_category)
        .service(get_all_categories)
        .service(get_specific_category)
        .service(update_specific_category)
        .service(get_subcategories_in_category)
        .service(get_items_in_category)
        // No delete route; categories are never deleted.
}
