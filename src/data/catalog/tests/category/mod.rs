mod find_category;

use super::*;
