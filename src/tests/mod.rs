mod macros;

mod index;
