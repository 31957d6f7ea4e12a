mod calls;
mod characters;
mod samples;
mod symbols;
