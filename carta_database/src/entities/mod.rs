pub mod category;
pub mod item;
pub mod subcategory;

pub use category::{
    CategoryModel,
    CategoryMutation,
    CategoryQuery,
    CategoryValuesToUpdate,
    NewCategory,
};
pub use item::{
    ExtendedItemModel,
    ItemModel,
    ItemMutation,
    ItemQuery,
    ItemValuesToUpdate,
    NewItem,
};
pub use subcategory::{
    ExtendedSubcategoryModel,
    NewSubcategory,
    SubcategoryModel,
    SubcategoryMutation,
    SubcategoryQuery,
    SubcategoryValuesToUpdate,
};
