mod functions;
mod rect;
