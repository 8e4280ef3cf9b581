#![no_std]
#![no_main]

#[cfg(target_os = "linux")]
mod linux {
    extern crate std;
    use embedded_hal::delay::DelayNs;
    use std::env;
    use std::println;
    use tsl2561::linux::{open_bus, Delay, I2cdev};
    use tsl2561::tsl2561::DEFAULT_ADDRESS;
    use tsl2561::{DriverUsingDelay, IntegrationTime, Tsl2561, WhoAmI};

    #[no_mangle]
    pub extern "C" fn main() {
        // handles only as decimal but should accept hexadecimal
        let mut args = env::args().skip(1);
        let i2c_bus: u8 = args
            .next()
            .map_or(1, |arg| arg.parse().expect("Error: Bus is not a number!"));
        let i2c_address: u8 = args.next().map_or(DEFAULT_ADDRESS, |arg| {
            arg.parse().expect("Error: Chip address is not a number!")
        });

        let i2c = open_bus(i2c_bus).unwrap();
        let mut tsl = Tsl2561::new(i2c, i2c_address, Delay).unwrap().init().unwrap();
        let expected = <Tsl2561<I2cdev, Delay> as WhoAmI<I2cdev, u8>>::EXPECTED_WHOAMI;
        if tsl.whoami().unwrap() != expected {
            println!("unexpected part number");
        }
        tsl.set_integration_time(IntegrationTime::Ms101).unwrap();

        let mut delay = Delay;
        loop {
            let reading = tsl.all().unwrap();
            println!("ch0 {} ch1 {}", reading.ch0, reading.ch1);
            println!("{} lux", reading.lux());
            delay.delay_ms(1000);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod other {
    extern crate std;
    use std::println;
    #[no_mangle]
    pub extern "C" fn main() {
        loop {
            println!("unsupported target");
        }
    }
}
