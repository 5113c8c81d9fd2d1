mod add_product;
mod associate_brand;
mod associate_category;
mod find_product;

use super::*;
