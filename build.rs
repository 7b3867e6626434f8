fn main() {
    // ESP-IDF link arguments are only needed for firmware builds; host tests
    // build without the toolchain.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
