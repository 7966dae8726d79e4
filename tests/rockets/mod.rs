//module tree
mod fire_admission;
