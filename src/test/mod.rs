mod test_level;
mod test_util;
