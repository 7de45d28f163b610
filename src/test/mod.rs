mod hfs;
mod hfsstate;
