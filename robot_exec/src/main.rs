//! Main robot-side executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logger and parameters
//!     - Load the match script
//!     - Initialise RobotCtrl around the simulated motor driver
//!     - Main loop:
//!         - Telecommand processing (mode, routine selection, input frames)
//!         - RobotCtrl processing (mode entry, then the mode's periodic action)
//!         - Archiving
//!         - Cycle management
//!     - Disable the robot once the script has ended

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use comms_if::{
    eqpt::{input::InputData, motor::ActId},
    tc::RobotMode,
};
use robot_lib::{
    clock::MonotonicClock, data_store::DataStore, params::RobotExecParams,
    robot_ctrl::RobotCtrl, sim_driver::SimMotorDriver, tc_processor,
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

// Internal
use util::{
    archive::Archived,
    host,
    logger::{logger_init, LevelFilter},
    raise_error,
    script_interpreter::{PendingTcs, ScriptInterpreter},
    session::Session,
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("robot_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Robot Executable\n");
    info!(
        "Running on: {:#?}",
        host::get_uname().wrap_err("Failed to get host information")?
    );
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: RobotExecParams =
        util::params::load("robot_exec.toml").wrap_err("Could not load exec params")?;

    if params.exec.cycle_period_s.is_nan() || params.exec.cycle_period_s <= 0.0 {
        return Err(eyre!(
            "Cycle period must be positive, found {}",
            params.exec.cycle_period_s
        ));
    }

    info!("Exec parameters loaded");

    // ---- LOAD SCRIPT ----

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    if args.len() != 2 {
        return Err(eyre!(
            "Expected exactly one argument (the match script), found {}",
            args.len() - 1
        ));
    }

    info!("Loading script from \"{}\"", &args[1]);

    let mut si = ScriptInterpreter::new(&args[1]).wrap_err("Failed to load script")?;

    info!(
        "Loaded script lasts {:.02} s and contains {} TCs\n",
        si.get_duration(),
        si.get_num_tcs()
    );

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let mut robot_ctrl = RobotCtrl::new(
        params.subsys,
        params.auto,
        params.teleop,
        SimMotorDriver::new(params.sim_driver.clone()),
        MonotonicClock::new(),
    );
    robot_ctrl
        .init_archives(&session)
        .wrap_err("Failed to initialise RobotCtrl")?;
    info!("RobotCtrl init complete");
    info!("Power constants: {:?}", robot_ctrl.cmd_layer().params());

    let mut ds = DataStore::new(robot_ctrl);

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let cycle_period = Duration::from_secs_f64(params.exec.cycle_period_s);

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        ds.cycle_start(params.exec.cycle_frequency_hz());

        // ---- TELECOMMAND PROCESSING ----

        match si.get_pending_tcs() {
            PendingTcs::None => (),
            PendingTcs::Some(tc_vec) => {
                for tc in tc_vec.iter() {
                    tc_processor::exec(&mut ds, tc);
                }
            }
            // Exit if end of script reached
            PendingTcs::EndOfScript => {
                info!("End of TC script reached, stopping");
                break;
            }
        }

        // ---- CONTROL ALGORITHM PROCESSING ----

        let report = ds.robot_ctrl.step(ds.desired_mode, &ds.inputs);

        if ds.is_1_hz_cycle {
            debug!("RobotCtrl status: {:?}", report);
            debug!("Subsystem demands: {:?}", ds.robot_ctrl.dems());
        }

        // ---- WRITE ARCHIVES ----

        if let Err(e) = ds.robot_ctrl.write() {
            warn!("Could not write RobotCtrl archives: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            }
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
                );
                ds.num_consec_cycle_overruns += 1;

                if ds.num_consec_cycle_overruns > params.exec.max_consec_cycle_overruns {
                    ds.robot_ctrl.step(RobotMode::Disabled, &InputData::default());
                    raise_error!(
                        "More than {} consecutive cycle overruns",
                        params.exec.max_consec_cycle_overruns
                    );
                }
            }
        }

        ds.cycle_end();
    }

    // ---- SHUTDOWN ----

    // Whatever the script left the robot doing, it ends disabled
    ds.robot_ctrl.step(RobotMode::Disabled, &InputData::default());
    if let Err(e) = ds.robot_ctrl.write() {
        warn!("Could not write RobotCtrl archives: {}", e);
    }

    let driver = ds.robot_ctrl.cmd_layer().driver();
    info!(
        "Executed {} cycles, {} mode entries, {} motor commands",
        ds.num_cycles,
        ds.robot_ctrl.report().num_mode_entries,
        driver.num_cmds()
    );
    for act in [ActId::DrvLeft, ActId::DrvRight, ActId::Arm, ActId::Intake].iter() {
        info!("    Final {:?} output: {:?}", act, driver.output(*act));
    }
    info!("End of execution");

    Ok(())
}
