mod helpers;
mod test_comments;
