use ahu_models::models::hvac::ahu::{
    AirHandlingUnit, Conditions, Parameters, SearchError, SetpointTarget, SolveConfig, SolveError,
};
use ahu_models::support::psychro::{MoistAir, Psychrometrics};
use approx::assert_relative_eq;
use twine_core::Model;
use uom::si::{
    f64::{MassRate, Power, Pressure, Ratio, ThermalConductance, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    pressure::kilopascal,
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

fn sales_room() -> Conditions {
    Conditions {
        outdoor_temperature: celsius(0.108),
        outdoor_humidity: Ratio::new::<ratio>(0.8),
        indoor_temperature: celsius(19.0),
        indoor_humidity_ratio: Ratio::new::<ratio>(MoistAir::standard().humidity_ratio(19.0, 0.5)),
        setpoint_temperature: celsius(19.0),
        setpoint_humidity: Ratio::new::<ratio>(0.5),
        infiltration: MassRate::new::<kilogram_per_second>(0.137_92),
        envelope_conductance: ThermalConductance::new::<watt_per_kelvin>(675.0),
        auxiliary_sensible: Power::new::<watt>(-5.1976),
        auxiliary_latent: Power::new::<watt>(3.36),
        cabinet_sensible: Power::new::<watt>(23.01),
        cabinet_latent: Power::new::<watt>(6.282),
    }
}

fn parameters(k_theta: f64) -> Parameters {
    Parameters::new(
        MassRate::new::<kilogram_per_second>(1.601),
        MassRate::new::<kilogram_per_second>(0.1601),
        Ratio::new::<ratio>(0.7),
        ThermalConductance::new::<watt_per_kelvin>(k_theta),
        Power::new::<watt>(1e9),
    )
    .unwrap()
}

/// Provider at a reduced total pressure, standing in for an external library.
struct Altitude(MoistAir);

impl Psychrometrics for Altitude {
    fn humidity_ratio(&self, temperature: f64, relative_humidity: f64) -> f64 {
        self.0.humidity_ratio(temperature, relative_humidity)
    }

    fn saturation_slope(&self, temperature: f64) -> f64 {
        self.0.saturation_slope(temperature)
    }
}

#[test]
fn ambient_sweep_holds_supply_at_setpoint() {
    let mut ahu = AirHandlingUnit::new(parameters(1e9), sales_room()).unwrap();

    for outdoor in [-20.0, -10.0, 0.0, 10.0, 20.0, 30.0] {
        ahu.set_conditions(sales_room().with_outdoor_temperature(celsius(outdoor)))
            .unwrap();
        let solution = ahu.call(&celsius(5.0)).unwrap();
        let supply = solution.supply().temperature.get::<degree_celsius>();

        // Proportional control leaves an offset of Qsc/Kθ.
        assert_relative_eq!(
            solution.coil_sensible().get::<watt>(),
            1e9 * (19.0 - supply),
            epsilon = 1e-2
        );
        assert_relative_eq!(supply, 19.0, epsilon = 1e-4);
    }

    ahu.reset();
    assert_eq!(ahu.actual(), ahu.design());
}

#[test]
fn flow_search_then_reset() {
    let mut ahu = AirHandlingUnit::new(parameters(0.0), sales_room()).unwrap();

    let solution = ahu
        .search_by_flow(SetpointTarget::parse("thetaS", 12.0).unwrap())
        .unwrap();
    assert_relative_eq!(
        solution.supply().temperature.get::<degree_celsius>(),
        12.0,
        epsilon = 1e-2
    );
    assert!(ahu.actual().parameters.supply_flow() > ahu.design().parameters.supply_flow());

    let moisture = ahu.moisture_to_add(solution.supply(), Ratio::new::<ratio>(0.008));
    assert!(moisture.get::<kilogram_per_second>() > 0.0);

    ahu.reset();
    assert_eq!(ahu.actual(), ahu.design());
}

#[test]
fn unknown_target_is_rejected_before_solving() {
    assert_eq!(
        SetpointTarget::parse("w5", 0.007),
        Err(SearchError::InvalidTarget("w5".to_owned()))
    );
}

#[test]
fn unreachable_setpoint_keeps_working_point() {
    let mut ahu = AirHandlingUnit::new(parameters(1e9), sales_room()).unwrap();
    let before = *ahu.actual();

    let result = ahu.search_by_bypass(SetpointTarget::SupplyTemperature(celsius(12.0)));

    assert!(matches!(result, Err(SearchError::NoSolution { .. })));
    assert_eq!(*ahu.actual(), before);
}

#[test]
fn iteration_bound_surfaces_as_error() {
    let ahu = AirHandlingUnit::new(parameters(1e9), sales_room())
        .unwrap()
        .with_solve_config(SolveConfig {
            max_iters: 1,
            ..SolveConfig::default()
        });
    assert!(matches!(
        ahu.call(&celsius(5.0)),
        Err(SolveError::NonConvergence { iters: 1, .. })
    ));
}

#[test]
fn custom_provider_at_altitude() {
    let air = MoistAir::at_pressure(Pressure::new::<kilopascal>(90.0)).unwrap();
    let high = AirHandlingUnit::with_psychrometrics(parameters(1e9), sales_room(), Altitude(air))
        .unwrap();
    let low = AirHandlingUnit::new(parameters(1e9), sales_room()).unwrap();

    let high = high.call(&celsius(5.0)).unwrap();
    let low = low.call(&celsius(5.0)).unwrap();

    assert!(high.supply().humidity_ratio > low.supply().humidity_ratio);
    assert_relative_eq!(
        high.supply().humidity_ratio.get::<ratio>(),
        air.humidity_ratio(19.0, 0.5),
        epsilon = 1e-5
    );
}
