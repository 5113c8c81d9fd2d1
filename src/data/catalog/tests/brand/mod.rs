mod add_brand;

use super::*;
