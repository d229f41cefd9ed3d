mod pipeline;
mod util;
