mod config;
mod controller;
mod dom;
mod grid;
mod like;
mod modal;
mod selects;
#[cfg(test)]
mod test_support;

fn main() {
    console_error_panic_hook::set_once();
    controller::start();
}
