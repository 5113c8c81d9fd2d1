mod add_image;
mod set_default_image;

use super::*;
