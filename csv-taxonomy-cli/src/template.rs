/// Example CSV in the format the importer expects: a header row with the
/// required `name` column plus the optional `slug`, `description`, and
/// `parent` columns. Parents are referenced by name or slug.
pub const SAMPLE_CSV: &str = "\
name,slug,description,parent
Technology,technology,Tech related posts,
Web Development,web-dev,Website development topics,Technology
Design,design,Design and creativity posts,
";
