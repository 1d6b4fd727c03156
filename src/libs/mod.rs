pub mod elbow;
pub mod io;
pub mod layout;
pub mod phylo;
