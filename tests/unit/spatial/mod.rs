mod bounds;
mod coordinate;
