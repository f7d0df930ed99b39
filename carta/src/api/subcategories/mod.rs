mod endpoints;
use actix_web::web;
pub use endpoints::*;

mod model_impls;


#[rustfmt::skip]
pub fn subcategories_router() -> actix_web::Scope {
    web::scope("/subcategories")
        .service(create_subcategory)
        .service(get_all_subcategories)
        .service(get_specific_subcategory)
        .service(update_specific_subcategory)
        .service(delete_specific_subcategory)
        .service(get_items_in_subcategory)
}
