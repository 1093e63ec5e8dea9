mod restore;
mod suppression;
