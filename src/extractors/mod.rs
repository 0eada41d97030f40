mod json_ld;

pub use self::json_ld::{find_recipe_node, JsonLdRecipe};
