/// Environment variable containing the name of the movies table
pub const TABLE_NAME: &'static str = "TABLE_NAME";
